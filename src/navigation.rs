//! Navigation Tree
//!
//! Static sidebar menu and role-based pruning.

use crate::session::Role;

/// One entry in the sidebar menu
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: Option<&'static str>,
    /// `None` means visible to every role
    pub roles: Option<Vec<Role>>,
    pub items: Option<Vec<NavItem>>,
}

impl NavItem {
    pub fn new(title: &'static str, url: &'static str) -> Self {
        Self {
            title,
            url,
            icon: None,
            roles: None,
            items: None,
        }
    }

    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn roles(mut self, roles: &[Role]) -> Self {
        self.roles = Some(roles.to_vec());
        self
    }

    pub fn children(mut self, items: Vec<NavItem>) -> Self {
        self.items = Some(items);
        self
    }

    /// Groups with children only expand; leaves open a page
    pub fn is_navigable(&self) -> bool {
        self.items.as_ref().map_or(true, |c| c.is_empty())
    }

    /// Whether this node itself passes the role gate (children not considered)
    pub fn visible_to(&self, role: Option<Role>) -> bool {
        match &self.roles {
            None => true,
            Some(allowed) => role.is_some_and(|r| allowed.contains(&r)),
        }
    }
}

/// Prune every node whose role gate rejects `role`, keeping order and shape.
///
/// A node that loses all of its children is still kept.
pub fn filter_navigation(items: &[NavItem], role: Option<Role>) -> Vec<NavItem> {
    items
        .iter()
        .filter(|item| item.visible_to(role))
        .map(|item| {
            let mut kept = item.clone();
            if let Some(children) = item.items.as_ref().filter(|c| !c.is_empty()) {
                kept.items = Some(filter_navigation(children, role));
            }
            kept
        })
        .collect()
}

/// Depth-first search for the node with `url`
pub fn find_by_url<'a>(items: &'a [NavItem], url: &str) -> Option<&'a NavItem> {
    for item in items {
        if item.url == url {
            return Some(item);
        }
        if let Some(found) = item.items.as_deref().and_then(|c| find_by_url(c, url)) {
            return Some(found);
        }
    }
    None
}

/// Dashboard sidebar menu
pub fn navigation_tree() -> Vec<NavItem> {
    use Role::*;

    vec![
        NavItem::new("Dashboard", "/dashboard").icon("🏠"),
        NavItem::new("Admins", "/admins").icon("🛡").roles(&[Admin]),
        NavItem::new("Agents", "/agents").icon("🧑‍💼").roles(&[Admin]),
        NavItem::new("Users", "/users").icon("👥").roles(&[Admin, Agent]),
        NavItem::new("Ad Accounts", "/ad-accounts").icon("📣").children(vec![
            NavItem::new("Facebook", "/ad-accounts/facebook"),
            NavItem::new("Google", "/ad-accounts/google"),
        ]),
        NavItem::new("Wallets", "/wallets").icon("👛").roles(&[Admin, Agent]),
        NavItem::new("Deposits", "/deposits").icon("💰"),
        NavItem::new("Transaction Logs", "/transaction-logs")
            .icon("📜")
            .roles(&[Admin, Agent]),
    ]
}
