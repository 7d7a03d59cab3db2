use serde_json::{Value as Json, json};

use crate::modules::users::core::ports::UserRepository;
use crate::modules::users::core::user::{User, UserCredentials, normalize_email};
use crate::shared::infrastructure::record_store::in_memory::InMemoryTable;
use crate::shared::infrastructure::record_store::{Item, StoreError, item};

pub const USERS_TABLE: &str = "time_tracking_users";

pub struct InMemoryUsers {
    table: InMemoryTable,
}

impl Default for InMemoryUsers {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self {
            table: InMemoryTable::new(USERS_TABLE, "user_id"),
        }
    }

    pub fn table(&self) -> &InMemoryTable {
        &self.table
    }
}

fn user_to_item(user: &User) -> Item {
    let value = json!({
        "user_id": user.user_id,
        "name": user.name,
        "email": normalize_email(&user.email),
        "role": user.role.as_str(),
        "must_change_password": user.must_change_password,
        "created_at": user.created_at.to_rfc3339(),
        "updated_at": user.updated_at.map(|at| at.to_rfc3339()),
    });
    match value {
        Json::Object(map) => map,
        _ => Item::new(),
    }
}

fn credentials_to_item(credentials: &UserCredentials) -> Item {
    let mut record = user_to_item(&credentials.user);
    record.insert("hashed_password".into(), json!(credentials.password_hash));
    record
}

fn item_to_user(record: &Item) -> Result<User, StoreError> {
    let key = item::string(record, "<unknown>", "user_id")?;
    Ok(User {
        name: item::string(record, &key, "name")?,
        email: item::string(record, &key, "email")?,
        role: item::parse_enum(record, &key, "role")?,
        must_change_password: item::boolean(record, &key, "must_change_password")?,
        created_at: item::utc(record, &key, "created_at")?,
        updated_at: item::optional_utc(record, &key, "updated_at")?,
        user_id: key,
    })
}

fn item_to_credentials(record: &Item) -> Result<UserCredentials, StoreError> {
    let user = item_to_user(record)?;
    let password_hash = item::string(record, &user.user_id, "hashed_password")?;
    Ok(UserCredentials {
        user,
        password_hash,
    })
}

#[async_trait::async_trait]
impl UserRepository for InMemoryUsers {
    async fn get(&self, user_id: &str) -> Result<Option<User>, StoreError> {
        self.table
            .get(user_id)
            .await?
            .as_ref()
            .map(item_to_user)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let items = self.table.query("email", &normalize_email(email)).await?;
        items.first().map(item_to_user).transpose()
    }

    async fn credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>, StoreError> {
        let items = self.table.query("email", &normalize_email(email)).await?;
        items.first().map(item_to_credentials).transpose()
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let mut users = self
            .table
            .scan()
            .await?
            .iter()
            .map(item_to_user)
            .collect::<Result<Vec<_>, _>>()?;
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.email.cmp(&b.email)));
        Ok(users)
    }

    async fn insert(&self, credentials: &UserCredentials) -> Result<(), StoreError> {
        self.table
            .insert_unique(credentials_to_item(credentials), "email")
            .await
    }

    async fn update(&self, user: &User, password_hash: Option<&str>) -> Result<User, StoreError> {
        let mut attributes = user_to_item(user);
        attributes.remove("created_at");
        if let Some(hash) = password_hash {
            attributes.insert("hashed_password".into(), json!(hash));
        }
        let stored = self
            .table
            .merge_unique(&user.user_id, "email", attributes)
            .await?;
        item_to_user(&stored)
    }

    async fn delete(&self, user_id: &str) -> Result<bool, StoreError> {
        self.table.delete(user_id).await
    }
}
