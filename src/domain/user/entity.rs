// src/domain/user/entity.rs
use crate::domain::outcome::ValueOutcome;
use crate::domain::user::value_objects::{Email, PersonalName, UserId};

/// Article owner. Articles reference users by [`UserId`] only.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Option<UserId>,
    pub personal_name: PersonalName,
    pub email: Email,
}

impl User {
    pub fn create(
        name: Option<String>,
        surname: Option<String>,
        email: Option<String>,
    ) -> ValueOutcome<Self> {
        PersonalName::create(name, surname)
            .zip(Email::create(email))
            .map(|(personal_name, email)| Self {
                id: None,
                personal_name,
                email,
            })
    }
}
