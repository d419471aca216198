pub mod resource;
pub mod use_case;
pub mod validation;

pub mod transform {
    pub mod user {
        use crate::{
            app::resource::{UserRequest, UserResponse},
            domain::entity::User,
        };

        impl From<&UserRequest> for User {
            fn from(request: &UserRequest) -> Self {
                Self {
                    id: None,
                    first_name: request.first_name.clone(),
                    last_name: request.last_name.clone(),
                    email: request.email.clone(),
                    phone_number: request.phone_number.clone(),
                }
            }
        }

        impl From<User> for UserResponse {
            fn from(user: User) -> Self {
                Self {
                    id: user.id.expect("Expect a persisted user entity with an id"),
                    first_name: user.first_name,
                    last_name: user.last_name,
                    email: user.email,
                    phone_number: user.phone_number,
                }
            }
        }

        /// Overwrites every request-carried field of the entity in place,
        /// leaving the id untouched. No partial merge: absent optional
        /// fields clear the stored value.
        pub fn apply_to_entity(request: &UserRequest, user: &mut User) {
            user.first_name = request.first_name.clone();
            user.last_name = request.last_name.clone();
            user.email = request.email.clone();
            user.phone_number = request.phone_number.clone();
        }

    }
}
