use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::AuthError;
use crate::errors::AppError;
use crate::models::user::{Account, Role};

/// In-memory account registry keyed by id, with a lowercase email index.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: HashMap<Uuid, Account>,
    by_email: HashMap<String, Uuid>,
}

impl AccountStore {
    pub fn register(
        &mut self,
        email: &str,
        name: &str,
        password: &str,
        role: Role,
    ) -> Result<Account, AppError> {
        let email = email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(AppError::Validation("email is invalid".to_string()));
        }
        if password.len() < 8 {
            return Err(AppError::Validation(
                "password must be at least 8 characters".to_string(),
            ));
        }
        if self.by_email.contains_key(&email) {
            return Err(AppError::Conflict(format!("{email} is already registered")));
        }

        let account = Account {
            id: Uuid::new_v4(),
            email: email.clone(),
            name: name.trim().to_string(),
            role,
            password_hash: hash_password(password)?,
            created_at: Utc::now(),
        };
        self.by_email.insert(email, account.id);
        self.accounts.insert(account.id, account.clone());
        Ok(account)
    }

    pub fn authenticate(&self, email: &str, password: &str) -> Result<&Account, AuthError> {
        let account = self
            .by_email
            .get(&email.trim().to_lowercase())
            .and_then(|id| self.accounts.get(id))
            .ok_or(AuthError::InvalidCredentials)?;

        if verify_password(password, &account.password_hash) {
            Ok(account)
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&Account> {
        self.accounts.get(&id)
    }
}
