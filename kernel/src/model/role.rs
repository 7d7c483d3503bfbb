use strum::{AsRefStr, EnumString};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
pub enum Role {
    Admin,
    #[default]
    User,
}
