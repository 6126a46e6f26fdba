pub mod ticket;
pub mod ticket_reply;
