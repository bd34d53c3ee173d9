use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Overdue => "overdue",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceLineItem {
    pub container_id: String,
    pub route: String,
    pub days_rented: u32,
    /// Daily lease rate in USD
    pub rate: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: String,
    pub number: String,
    pub date: String,
    pub due_date: String,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub line_items: Vec<InvoiceLineItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_item_totals_follow_rate() {
        let item = InvoiceLineItem {
            container_id: "OC-2401".to_string(),
            route: "FRA → JFK".to_string(),
            days_rented: 7,
            rate: 450.0,
            total: 3150.0,
        };
        assert_eq!(item.rate * item.days_rented as f64, item.total);
    }
}
