use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};

use crate::error::{AppError, Res};

/// Shared-secret check guarding every admin operation.
///
/// Only the argon2 hash of the configured password is kept in memory.
#[derive(Clone, Debug)]
pub struct AdminGate {
    password_hash: String,
}

impl AdminGate {
    pub fn new(admin_password: &str) -> Res<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(admin_password.as_bytes(), &salt)
            .map_err(AppError::PasswordHash)?
            .to_string();

        Ok(AdminGate { password_hash })
    }

    /// Fails with `MissingCredential` for an absent or empty password and
    /// `InvalidCredential` when it does not match.
    pub fn verify(&self, password: Option<&str>) -> Res<()> {
        let password = match password {
            Some(password) if !password.is_empty() => password,
            _ => return Err(AppError::MissingCredential),
        };

        let parsed_hash = PasswordHash::new(&self.password_hash).map_err(AppError::PasswordHash)?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AppError::InvalidCredential)
    }
}
