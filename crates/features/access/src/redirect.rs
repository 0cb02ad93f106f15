use campus_domain::config::AccessConfig;
use campus_domain::role::Role;

/// Where the guard sends people it will not render for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectPolicy {
    sign_in: String,
    home: String,
    student: String,
    faculty: String,
    admin: String,
    alumni: String,
}

impl RedirectPolicy {
    /// Destination for sessions without a user.
    #[must_use]
    pub fn sign_in(&self) -> &str {
        &self.sign_in
    }

    /// Global home, used for roles without a dedicated landing page.
    #[must_use]
    pub fn home(&self) -> &str {
        &self.home
    }

    /// Landing page for a signed-in user that lacks access.
    #[must_use]
    pub fn destination_for(&self, role: Role) -> &str {
        match role {
            Role::Student => &self.student,
            Role::Faculty => &self.faculty,
            Role::Admin => &self.admin,
            Role::Alumni => &self.alumni,
            Role::Unknown => &self.home,
        }
    }
}

impl From<&AccessConfig> for RedirectPolicy {
    fn from(cfg: &AccessConfig) -> Self {
        Self {
            sign_in: cfg.sign_in_path.clone(),
            home: cfg.home_path.clone(),
            student: cfg.homes.student.clone(),
            faculty: cfg.homes.faculty.clone(),
            admin: cfg.homes.admin.clone(),
            alumni: cfg.homes.alumni.clone(),
        }
    }
}

impl Default for RedirectPolicy {
    fn default() -> Self {
        Self::from(&AccessConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mapping() {
        let policy = RedirectPolicy::default();
        assert_eq!(policy.sign_in(), "/signin");
        assert_eq!(policy.destination_for(Role::Student), "/student");
        assert_eq!(policy.destination_for(Role::Faculty), "/faculty");
        assert_eq!(policy.destination_for(Role::Admin), "/admin");
        assert_eq!(policy.destination_for(Role::Alumni), "/alumni");
        assert_eq!(policy.destination_for(Role::Unknown), "/");
    }

    #[test]
    fn follows_config() {
        let mut cfg = AccessConfig::default();
        cfg.home_path = "/portal".to_owned();
        cfg.homes.admin = "/console".to_owned();

        let policy = RedirectPolicy::from(&cfg);
        assert_eq!(policy.destination_for(Role::Admin), "/console");
        assert_eq!(policy.destination_for(Role::Unknown), "/portal");
    }
}
