use serde::{Deserialize, Serialize};

/// Authorization tier of the current session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
        }
    }

    /// Badge text shown in the topbar.
    pub fn view_label(&self) -> &'static str {
        match self {
            Role::Customer => "Client View",
            Role::Admin => "Staff View",
        }
    }
}

/// Session state for the lifetime of the tab. `role == None` is the
/// anonymous state; `selected_container_id` only drives detail-view
/// navigation and is wiped on logout.
///
/// Transitions return a new value instead of mutating, so the owning
/// state handle stays the single writer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub role: Option<Role>,
    pub selected_container_id: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    pub fn login(&self, role: Role) -> Session {
        Session {
            role: Some(role),
            selected_container_id: self.selected_container_id.clone(),
        }
    }

    pub fn logout(&self) -> Session {
        Session::default()
    }

    /// Live role switch without re-authentication. Selecting the active
    /// role again, or switching while anonymous, changes nothing.
    pub fn switch_role(&self, role: Role) -> Session {
        match self.role {
            Some(current) if current != role => Session {
                role: Some(role),
                selected_container_id: self.selected_container_id.clone(),
            },
            _ => self.clone(),
        }
    }

    pub fn select_container(&self, id: String) -> Session {
        Session {
            role: self.role,
            selected_container_id: Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_anonymous() {
        let session = Session::default();
        assert_eq!(session.role, None);
        assert_eq!(session.selected_container_id, None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn login_sets_role() {
        let session = Session::default().login(Role::Customer);
        assert_eq!(session.role, Some(Role::Customer));
        assert!(session.is_authenticated());
        assert!(!session.is_admin());

        let session = Session::default().login(Role::Admin);
        assert!(session.is_admin());
    }

    #[test]
    fn logout_clears_role_and_selection() {
        let session = Session::default()
            .login(Role::Admin)
            .select_container("OC-2404".to_string());
        assert_eq!(session.selected_container_id.as_deref(), Some("OC-2404"));

        let session = session.logout();
        assert_eq!(session.role, None);
        assert_eq!(session.selected_container_id, None);
    }

    #[test]
    fn switch_role_swaps_between_authenticated_roles() {
        let session = Session::default().login(Role::Admin);
        let session = session.switch_role(Role::Customer);
        assert_eq!(session.role, Some(Role::Customer));

        let session = session.switch_role(Role::Admin);
        assert_eq!(session.role, Some(Role::Admin));
    }

    #[test]
    fn switch_role_to_same_role_is_noop() {
        let session = Session::default()
            .login(Role::Admin)
            .select_container("OC-2401".to_string());
        let after = session.switch_role(Role::Admin);
        assert_eq!(after, session);
    }

    #[test]
    fn switch_role_while_anonymous_is_noop() {
        let session = Session::default().switch_role(Role::Admin);
        assert_eq!(session.role, None);
    }

    #[test]
    fn switch_role_keeps_selection() {
        let session = Session::default()
            .login(Role::Admin)
            .select_container("OC-2403".to_string())
            .switch_role(Role::Customer);
        assert_eq!(session.selected_container_id.as_deref(), Some("OC-2403"));
    }
}
