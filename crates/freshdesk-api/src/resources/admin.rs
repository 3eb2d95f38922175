//! Account administration resources.

use super::capabilities::{List, Update, View};

resource! {
    /// Products configured in a multi-product helpdesk.
    Products => "/products"
}

impl List for Products {}
impl View for Products {}

resource! {
    /// Support mailboxes.
    EmailConfigs => "/email_configs"
}

impl List for EmailConfigs {}
impl View for EmailConfigs {}

resource! {
    /// Service level agreement policies.
    SlaPolicies => "/sla_policies"
}

impl List for SlaPolicies {}
impl Update for SlaPolicies {}

resource! {
    /// Business hours calendars.
    BusinessHours => "/business_hours"
}

impl List for BusinessHours {}
impl View for BusinessHours {}
