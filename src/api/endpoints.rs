//! List Endpoints
//!
//! Which list integration backs each dashboard page, per role.

use super::{ListEndpoint, ParamStyle, TotalsStyle};
use crate::session::Role;

/// Resources with a list page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Admins,
    Agents,
    Users,
    FacebookAccounts,
    GoogleAccounts,
    Wallets,
    Deposits,
    TransactionLogs,
}

impl Resource {
    /// Resource shown for a sidebar url
    pub fn from_url(url: &str) -> Option<Self> {
        match url {
            "/admins" => Some(Self::Admins),
            "/agents" => Some(Self::Agents),
            "/users" => Some(Self::Users),
            "/ad-accounts/facebook" => Some(Self::FacebookAccounts),
            "/ad-accounts/google" => Some(Self::GoogleAccounts),
            "/wallets" => Some(Self::Wallets),
            "/deposits" => Some(Self::Deposits),
            "/transaction-logs" => Some(Self::TransactionLogs),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Admins => "Admins",
            Self::Agents => "Agents",
            Self::Users => "Users",
            Self::FacebookAccounts => "Facebook Ad Accounts",
            Self::GoogleAccounts => "Google Ad Accounts",
            Self::Wallets => "Wallets",
            Self::Deposits => "Deposits",
            Self::TransactionLogs => "Transaction Logs",
        }
    }

    /// Whether the page offers a date-range filter
    pub fn has_date_filter(&self) -> bool {
        matches!(self, Self::Deposits | Self::TransactionLogs | Self::Users)
    }

    /// The list integration used for `role`
    pub fn endpoint(&self, role: Option<Role>) -> ListEndpoint {
        use ParamStyle as P;
        use TotalsStyle as T;

        let agent = role == Some(Role::Agent);
        match self {
            Self::Admins => ListEndpoint::new("/admins", P::SNAKE, T::Total),
            Self::Agents => ListEndpoint::new("/agents", P::SNAKE, T::Total),
            Self::Users if agent => ListEndpoint::new("/agent/users", P::LIMIT_CAMEL, T::TotalPages),
            Self::Users => ListEndpoint::new("/users", P::LIMIT_CAMEL, T::TotalPages),
            Self::FacebookAccounts => match role {
                Some(Role::User) => ListEndpoint::new("/user/ad-accounts/facebook", P::LIMIT_CAMEL, T::RowCount),
                _ => ListEndpoint::new("/ad-accounts/facebook", P::LIMIT_CAMEL, T::TotalPages),
            },
            Self::GoogleAccounts => match role {
                Some(Role::User) => ListEndpoint::new("/user/ad-accounts/google", P::LIMIT_CAMEL, T::RowCount),
                _ => ListEndpoint::new("/ad-accounts/google", P::LIMIT_CAMEL, T::TotalPages),
            },
            Self::Wallets => ListEndpoint::new("/wallets", P::SNAKE, T::RowCount),
            Self::Deposits => match role {
                Some(Role::Agent) => ListEndpoint::new("/agent/deposits", P::SNAKE, T::Total),
                Some(Role::User) => ListEndpoint::new("/user/deposits", P::SNAKE, T::Total),
                _ => ListEndpoint::new("/deposits", P::SNAKE, T::Total),
            },
            Self::TransactionLogs if agent => {
                ListEndpoint::new("/agent/transaction-logs", P::LIMIT_CAMEL, T::RowCount)
            }
            Self::TransactionLogs => ListEndpoint::new("/transaction-logs", P::LIMIT_CAMEL, T::RowCount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{navigation_tree, NavItem};

    fn leaf_urls(items: &[NavItem], out: &mut Vec<&'static str>) {
        for item in items {
            match item.items.as_deref() {
                Some(children) if !children.is_empty() => leaf_urls(children, out),
                _ => out.push(item.url),
            }
        }
    }

    #[test]
    fn test_every_menu_leaf_but_dashboard_has_a_resource() {
        let mut urls = Vec::new();
        leaf_urls(&navigation_tree(), &mut urls);
        for url in urls {
            assert_eq!(Resource::from_url(url).is_some(), url != "/dashboard", "{}", url);
        }
    }

    #[test]
    fn test_role_variants() {
        assert_eq!(Resource::Deposits.endpoint(Some(Role::Agent)).path, "/agent/deposits");
        assert_eq!(Resource::Deposits.endpoint(Some(Role::Admin)).path, "/deposits");
        assert_eq!(Resource::Deposits.endpoint(None).path, "/deposits");
        assert_eq!(Resource::Users.endpoint(Some(Role::Agent)).path, "/agent/users");
    }
}
