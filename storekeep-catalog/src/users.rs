//! User mutations. Passwords are bcrypt-hashed before storage and the
//! service only ever hands out `PublicUser`, which carries no password
//! field at all.

use crate::error::{CatalogError, CatalogResult, EntityKind};
use crate::input;
use crate::uniqueness;
use std::sync::Arc;
use storekeep_model::{PublicUser, RecordId, User, UserInput, now_millis};
use storekeep_storage::{Collection, DocumentStore};
use tracing::info;

/// Work factor matching the store's existing password hashes.
const BCRYPT_COST: u32 = 10;

/// Create/update/delete/list for users.
pub struct UserService {
    store: Arc<DocumentStore>,
}

impl UserService {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// All users, without password hashes.
    pub fn list(&self) -> CatalogResult<Vec<PublicUser>> {
        let docs = self.store.all(Collection::Users)?;
        let mut users = Vec::with_capacity(docs.len());
        for doc in docs {
            let user: User = serde_json::from_value(doc)?;
            users.push(PublicUser::from(user));
        }
        Ok(users)
    }

    /// Create a user. Requires name, email and password; email must be
    /// unique case-insensitively.
    pub fn create(&self, input: UserInput) -> CatalogResult<PublicUser> {
        const MISSING: &str = "All fields are required";
        let name = input::require_str(input.name.as_deref(), MISSING)?.to_owned();
        let email = input::require_str(input.email.as_deref(), MISSING)?.to_owned();
        let password = input::require_str(input.password.as_deref(), MISSING)?;

        uniqueness::check_user_email(&self.store, &email, None)?;

        let now = now_millis();
        let user = User {
            id: RecordId::new().to_string(),
            email,
            password: bcrypt::hash(password, BCRYPT_COST)?,
            name,
            address: input.address,
            created_at: now,
            updated_at: now,
        };
        self.store
            .insert(Collection::Users, &user.id, &serde_json::to_value(&user)?)?;
        info!("created user {} ({})", user.name, user.id);
        Ok(PublicUser::from(user))
    }

    /// Update a user's name, email and address. The password is only
    /// replaced when a non-empty one is submitted.
    pub fn update(&self, input: UserInput) -> CatalogResult<PublicUser> {
        const MISSING: &str = "All fields except password are required";
        let id = input::require_str(input.id.as_deref(), MISSING)?.to_owned();
        let name = input::require_str(input.name.as_deref(), MISSING)?.to_owned();
        let email = input::require_str(input.email.as_deref(), MISSING)?.to_owned();

        let doc = self
            .store
            .get(Collection::Users, &id)?
            .ok_or(CatalogError::NotFound(EntityKind::User))?;
        let mut user: User = serde_json::from_value(doc)?;

        uniqueness::check_user_email(&self.store, &email, Some(&id))?;

        user.name = name;
        user.email = email;
        user.address = input.address;
        if let Some(password) = input.password.as_deref()
            && !password.is_empty()
        {
            user.password = bcrypt::hash(password, BCRYPT_COST)?;
        }
        user.updated_at = now_millis();

        self.store
            .replace(Collection::Users, &id, &serde_json::to_value(&user)?)?;
        info!("updated user {} ({})", user.name, user.id);
        Ok(PublicUser::from(user))
    }

    /// Delete a user by id.
    pub fn delete(&self, id: Option<&str>) -> CatalogResult<String> {
        let id = input::require_str(id, "User ID Required")?;
        let doc = self
            .store
            .get(Collection::Users, id)?
            .ok_or(CatalogError::NotFound(EntityKind::User))?;
        let user: User = serde_json::from_value(doc)?;

        self.store.remove(Collection::Users, id)?;
        info!("deleted user {} ({})", user.name, user.id);
        Ok(format!("Email {} with ID {} deleted", user.name, user.id))
    }
}
