//! Response DTOs
//!
//! Data structures for API response bodies. Entity IDs always appear under
//! a normalized `id` field in string form; the storage representation never
//! leaks raw.

use serde::Serialize;

use crate::application::services::{PlaceDto, UserDto};

/// Place response
#[derive(Debug, Serialize)]
pub struct PlaceResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub address: String,
    pub image: String,
    pub creator: String,
    pub created_at: String,
}

impl From<PlaceDto> for PlaceResponse {
    fn from(dto: PlaceDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            address: dto.address,
            image: dto.image_url,
            creator: dto.creator,
            created_at: dto.created_at,
        }
    }
}

/// Single-place envelope: `{ "place": ... }`
#[derive(Debug, Serialize)]
pub struct PlaceEnvelope {
    pub place: PlaceResponse,
}

/// Place-list envelope: `{ "places": [...] }`
#[derive(Debug, Serialize)]
pub struct PlacesEnvelope {
    pub places: Vec<PlaceResponse>,
}

/// User response. Never carries password material.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image: String,
    pub created_at: String,
}

impl From<UserDto> for UserResponse {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            email: dto.email,
            image: dto.image_url,
            created_at: dto.created_at,
        }
    }
}

/// Single-user envelope: `{ "user": ... }`
#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

/// User-list envelope: `{ "users": [...] }`
#[derive(Debug, Serialize)]
pub struct UsersEnvelope {
    pub users: Vec<UserResponse>,
}

/// Message envelope for deletions: `{ "message": ... }`
#[derive(Debug, Serialize)]
pub struct MessageEnvelope {
    pub message: &'static str,
}

/// Login response: `{ "message": ..., "user": ... }`
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user_dto() -> UserDto {
        UserDto {
            id: "42".into(),
            name: "Max".into(),
            email: "max@test.com".into(),
            image_url: "https://cdn.test/user.jpg".into(),
            created_at: "2024-01-01T00:00:00+00:00".into(),
        }
    }

    #[test]
    fn test_place_envelope_shape() {
        let envelope = PlaceEnvelope {
            place: PlaceResponse::from(PlaceDto {
                id: "7".into(),
                title: "Eiffel Tower".into(),
                description: "A famous Paris landmark".into(),
                address: "Champ de Mars, Paris".into(),
                image_url: "https://cdn.test/place.jpg".into(),
                creator: "42".into(),
                created_at: "2024-01-01T00:00:00+00:00".into(),
            }),
        };

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["place"]["id"], "7");
        assert_eq!(json["place"]["creator"], "42");
        assert_eq!(json["place"]["image"], "https://cdn.test/place.jpg");
    }

    #[test]
    fn test_user_response_has_no_password_field() {
        let json = serde_json::to_value(UserResponse::from(sample_user_dto())).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("password_hash"));
        assert_eq!(json["id"], "42");
    }

    #[test]
    fn test_login_response_shape() {
        let response = LoginResponse {
            message: "Logged In",
            user: UserResponse::from(sample_user_dto()),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "Logged In");
        assert_eq!(json["user"]["email"], "max@test.com");
    }
}
