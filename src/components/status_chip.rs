use yew::prelude::*;

use crate::models::{
    AlertSeverity, ContainerStatus, CustomerStatus, IntegrationStatus, InvoiceStatus,
};

/// Color family for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipTone {
    Positive,
    Caution,
    Negative,
    Neutral,
}

impl ChipTone {
    fn class(&self) -> &'static str {
        match self {
            ChipTone::Positive => "chip-positive",
            ChipTone::Caution => "chip-caution",
            ChipTone::Negative => "chip-negative",
            ChipTone::Neutral => "chip-neutral",
        }
    }
}

impl From<ContainerStatus> for ChipTone {
    fn from(status: ContainerStatus) -> Self {
        match status {
            ContainerStatus::Ok => ChipTone::Positive,
            ContainerStatus::Warning => ChipTone::Caution,
            ContainerStatus::Critical => ChipTone::Negative,
        }
    }
}

impl From<InvoiceStatus> for ChipTone {
    fn from(status: InvoiceStatus) -> Self {
        match status {
            InvoiceStatus::Paid => ChipTone::Positive,
            InvoiceStatus::Pending => ChipTone::Caution,
            InvoiceStatus::Overdue => ChipTone::Negative,
        }
    }
}

impl From<IntegrationStatus> for ChipTone {
    fn from(status: IntegrationStatus) -> Self {
        match status {
            IntegrationStatus::Connected => ChipTone::Positive,
            IntegrationStatus::Disconnected => ChipTone::Negative,
            IntegrationStatus::Error => ChipTone::Negative,
        }
    }
}

impl From<CustomerStatus> for ChipTone {
    fn from(status: CustomerStatus) -> Self {
        match status {
            CustomerStatus::Active => ChipTone::Positive,
            CustomerStatus::Inactive => ChipTone::Neutral,
        }
    }
}

impl From<AlertSeverity> for ChipTone {
    fn from(severity: AlertSeverity) -> Self {
        match severity {
            AlertSeverity::Warning => ChipTone::Caution,
            AlertSeverity::Critical => ChipTone::Negative,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusChipProps {
    pub label: AttrValue,
    pub tone: ChipTone,
}

#[function_component(StatusChip)]
pub fn status_chip(props: &StatusChipProps) -> Html {
    html! {
        <span class={classes!("status-chip", props.tone.class())}>
            <span class="chip-dot"></span>
            { props.label.clone() }
        </span>
    }
}
