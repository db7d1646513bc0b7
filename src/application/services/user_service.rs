//! User Service
//!
//! Handles signup, login, and user listing. Passwords are stored as argon2
//! hashes and verified in constant time; the raw password never persists
//! and never appears in a response.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;
use chrono::Utc;

use crate::config::AssetSettings;
use crate::domain::{User, UserRepository};
use crate::shared::error::AppError;
use crate::shared::snowflake::SnowflakeGenerator;
use crate::shared::validation::normalize_email;

/// User service trait for dependency injection
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user
    async fn signup(&self, request: SignupDto) -> Result<UserDto, UserError>;

    /// Authenticate a user with credentials
    async fn login(&self, email: &str, password: &str) -> Result<UserDto, UserError>;

    /// List all users (password excluded)
    async fn list_users(&self) -> Result<Vec<UserDto>, UserError>;
}

/// Signup request
#[derive(Debug, Clone)]
pub struct SignupDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// User data transfer object. Carries no password material.
#[derive(Debug, Clone)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub created_at: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            image_url: user.image_url,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("Email already exists")]
    EmailExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Store call timed out")]
    Timeout,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl UserError {
    fn from_repo(err: AppError) -> Self {
        match err {
            AppError::Conflict(_) => UserError::EmailExists,
            AppError::Timeout => UserError::Timeout,
            other => UserError::Storage(other.to_string()),
        }
    }
}

/// UserService implementation
pub struct UserServiceImpl<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    id_generator: Arc<SnowflakeGenerator>,
    assets: AssetSettings,
}

impl<U> UserServiceImpl<U>
where
    U: UserRepository,
{
    /// Create a new UserServiceImpl
    pub fn new(
        user_repo: Arc<U>,
        id_generator: Arc<SnowflakeGenerator>,
        assets: AssetSettings,
    ) -> Self {
        Self {
            user_repo,
            id_generator,
            assets,
        }
    }

    /// Hash a password using Argon2id
    fn hash_password(&self, password: &str) -> Result<String, UserError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::Internal(format!("Password hashing failed: {}", e)))
    }

    /// Verify a password against its hash
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, UserError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| UserError::Internal(format!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
    U: UserRepository + 'static,
{
    async fn signup(&self, request: SignupDto) -> Result<UserDto, UserError> {
        let email = normalize_email(&request.email);

        // Check if email already exists
        if self
            .user_repo
            .email_exists(&email)
            .await
            .map_err(UserError::from_repo)?
        {
            return Err(UserError::EmailExists);
        }

        let password_hash = self.hash_password(&request.password)?;

        let now = Utc::now();
        let user = User {
            id: self.id_generator.generate(),
            name: request.name,
            email,
            password_hash,
            image_url: self.assets.user_image_url.clone(),
            created_at: now,
            updated_at: now,
        };

        // The unique index still backs the invariant if two signups race
        // past the existence check; the repository maps that to a conflict.
        let created = self
            .user_repo
            .create(&user)
            .await
            .map_err(UserError::from_repo)?;

        tracing::info!(user_id = %created.id, "User registered");

        Ok(UserDto::from(created))
    }

    async fn login(&self, email: &str, password: &str) -> Result<UserDto, UserError> {
        let email = normalize_email(email);

        let user = self
            .user_repo
            .find_by_email(&email)
            .await
            .map_err(UserError::from_repo)?
            // Unknown email and wrong password are indistinguishable to
            // the caller.
            .ok_or(UserError::InvalidCredentials)?;

        if !self.verify_password(password, &user.password_hash)? {
            return Err(UserError::InvalidCredentials);
        }

        Ok(UserDto::from(user))
    }

    async fn list_users(&self) -> Result<Vec<UserDto>, UserError> {
        let users = self
            .user_repo
            .list_all()
            .await
            .map_err(UserError::from_repo)?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockUserRepository;
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    fn assets() -> AssetSettings {
        AssetSettings {
            place_image_url: "https://cdn.test/place.jpg".into(),
            user_image_url: "https://cdn.test/user.jpg".into(),
        }
    }

    fn service(user_repo: MockUserRepository) -> UserServiceImpl<MockUserRepository> {
        UserServiceImpl::new(
            Arc::new(user_repo),
            Arc::new(SnowflakeGenerator::new(1, 0)),
            assets(),
        )
    }

    fn signup_request() -> SignupDto {
        SignupDto {
            name: "Max".into(),
            email: "Max@Test.COM".into(),
            password: "secret-password".into(),
        }
    }

    #[tokio::test]
    async fn test_signup_normalizes_email_and_hashes_password() {
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_email_exists()
            .with(eq("max@test.com"))
            .returning(|_| Ok(false));
        user_repo
            .expect_create()
            .withf(|user| {
                user.email == "max@test.com"
                    && user.password_hash != "secret-password"
                    && user.password_hash.starts_with("$argon2")
                    && user.image_url == "https://cdn.test/user.jpg"
            })
            .times(1)
            .returning(|user| Ok(user.clone()));

        let svc = service(user_repo);
        let dto = svc.signup(signup_request()).await.unwrap();

        assert_eq!(dto.email, "max@test.com");
        assert_eq!(dto.image_url, "https://cdn.test/user.jpg");
    }

    #[tokio::test]
    async fn test_signup_with_existing_email_is_conflict_and_creates_nothing() {
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_email_exists().returning(|_| Ok(true));

        // No expectation on create: a call would panic the mock.
        let svc = service(user_repo);
        assert!(matches!(
            svc.signup(signup_request()).await,
            Err(UserError::EmailExists)
        ));
    }

    #[tokio::test]
    async fn test_signup_maps_racing_unique_violation_to_conflict() {
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_email_exists().returning(|_| Ok(false));
        user_repo
            .expect_create()
            .returning(|_| Err(AppError::Conflict("duplicate email".into())));

        let svc = service(user_repo);
        assert!(matches!(
            svc.signup(signup_request()).await,
            Err(UserError::EmailExists)
        ));
    }

    #[tokio::test]
    async fn test_login_with_unknown_email_is_invalid_credentials() {
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_find_by_email().returning(|_| Ok(None));

        let svc = service(user_repo);
        assert!(matches!(
            svc.login("nobody@test.com", "whatever").await,
            Err(UserError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_login_round_trip_and_wrong_password_rejection() {
        // Hash through the same code path signup uses.
        let svc_for_hash = service(MockUserRepository::new());
        let hash = svc_for_hash.hash_password("secret-password").unwrap();

        let now = Utc::now();
        let stored = User {
            id: 42,
            name: "Max".into(),
            email: "max@test.com".into(),
            password_hash: hash,
            image_url: "https://cdn.test/user.jpg".into(),
            created_at: now,
            updated_at: now,
        };

        let stored_ok = stored.clone();
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_email()
            .with(eq("max@test.com"))
            .returning(move |_| Ok(Some(stored_ok.clone())));

        let svc = service(user_repo);

        let dto = svc.login(" Max@Test.com ", "secret-password").await.unwrap();
        assert_eq!(dto.id, "42");

        // Same lookup result, wrong password: indistinguishable failure.
        assert!(matches!(
            svc.login("max@test.com", "wrong-password").await,
            Err(UserError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_list_users_maps_to_dtos() {
        let now = Utc::now();
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_list_all().returning(move || {
            Ok(vec![User {
                id: 1,
                name: "Max".into(),
                email: "max@test.com".into(),
                password_hash: "$argon2id$hash".into(),
                image_url: "https://cdn.test/user.jpg".into(),
                created_at: now,
                updated_at: now,
            }])
        });

        let svc = service(user_repo);
        let users = svc.list_users().await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, "1");
    }

    #[tokio::test]
    async fn test_storage_fault_surfaces_as_storage_error() {
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_list_all()
            .returning(|| Err(AppError::Database(sqlx::Error::PoolClosed)));

        let svc = service(user_repo);
        assert!(matches!(
            svc.list_users().await,
            Err(UserError::Storage(_))
        ));
    }
}
