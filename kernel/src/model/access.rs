use crate::model::{id::UserId, role::Role};

// 予約に対するアクセス権の判定結果。
// - Owner: 予約の所有者。閲覧・取消の両方ができる
// - AdminViewOnly: 管理者が他ユーザーの予約を見る場合。閲覧のみ可
// - Denied: それ以外。一切の操作を許可しない
//
// 存在しない予約は認可判定より先に NOT_FOUND とする。
// このため 403 の返却は予約の存在を示唆するが、許容するトレードオフとしている。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationAccess {
    Owner,
    AdminViewOnly,
    Denied,
}

impl ReservationAccess {
    pub fn resolve(actor_id: UserId, actor_role: Role, owner_id: UserId) -> Self {
        if actor_id == owner_id {
            return Self::Owner;
        }
        match actor_role {
            Role::Admin => Self::AdminViewOnly,
            Role::User => Self::Denied,
        }
    }

    pub fn allows_read(&self) -> bool {
        matches!(self, Self::Owner | Self::AdminViewOnly)
    }

    pub fn allows_mutation(&self) -> bool {
        matches!(self, Self::Owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_has_full_access() {
        let owner_id = UserId::new();

        let access = ReservationAccess::resolve(owner_id, Role::User, owner_id);
        assert_eq!(access, ReservationAccess::Owner);
        assert!(access.allows_read());
        assert!(access.allows_mutation());
    }

    #[test]
    fn admin_owning_reservation_is_owner() {
        let owner_id = UserId::new();

        let access = ReservationAccess::resolve(owner_id, Role::Admin, owner_id);
        assert_eq!(access, ReservationAccess::Owner);
        assert!(access.allows_mutation());
    }

    #[test]
    fn admin_can_read_but_not_mutate_others_reservation() {
        let admin_id = UserId::new();
        let owner_id = UserId::new();

        let access = ReservationAccess::resolve(admin_id, Role::Admin, owner_id);
        assert_eq!(access, ReservationAccess::AdminViewOnly);
        assert!(access.allows_read());
        assert!(!access.allows_mutation());
    }

    #[test]
    fn other_user_is_denied_entirely() {
        let actor_id = UserId::new();
        let owner_id = UserId::new();

        let access = ReservationAccess::resolve(actor_id, Role::User, owner_id);
        assert_eq!(access, ReservationAccess::Denied);
        assert!(!access.allows_read());
        assert!(!access.allows_mutation());
    }
}
