use garde::Validate;
use kernel::model::{
    id::UserId,
    role::Role,
    user::{event::CreateUser, User},
};
use serde::{Deserialize, Serialize};
use strum::VariantNames;

#[derive(Serialize, Deserialize, VariantNames)]
#[strum(serialize_all = "kebab-case")]
pub enum RoleName {
    Admin,
    User,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Admin => Self::Admin,
            Role::User => Self::User,
        }
    }
}

impl From<RoleName> for Role {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Admin => Self::Admin,
            RoleName::User => Self::User,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
    #[garde(length(min = 1))]
    pub national_id: String,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            name,
            email,
            password,
            national_id,
        } = value;
        Self {
            user_name: name,
            email,
            password,
            national_id,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub national_id: String,
    pub role: RoleName,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            user_name,
            email,
            national_id,
            role,
        } = value;
        Self {
            user_id,
            user_name,
            email,
            national_id,
            role: RoleName::from(role),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RolesResponse {
    pub items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_serialize_in_kebab_case() {
        assert_eq!(RoleName::VARIANTS, ["admin", "user"]);
    }

    #[test]
    fn create_user_request_maps_name_to_user_name() {
        let req: CreateUserRequest = serde_json::from_str(
            r#"{
                "name": "山田太郎",
                "email": "taro@example.com",
                "password": "hashedpassword",
                "nationalId": "AB1234567"
            }"#,
        )
        .unwrap();
        let event = CreateUser::from(req);

        assert_eq!(event.user_name, "山田太郎");
        assert_eq!(event.email, "taro@example.com");
        assert_eq!(event.national_id, "AB1234567");
    }
}
