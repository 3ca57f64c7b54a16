use std::str::FromStr;

use crate::model::id::{EnrollmentId, TicketId, TicketTypeId};

#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
}

#[derive(Debug, Clone)]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    pub price: i64,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Reserved,
    Paid,
}

impl FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RESERVED" => Ok(TicketStatus::Reserved),
            "PAID" => Ok(TicketStatus::Paid),
            other => Err(format!("unknown ticket status: {other}")),
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TicketStatus::Reserved => "RESERVED",
            TicketStatus::Paid => "PAID",
        };
        f.write_str(s)
    }
}
