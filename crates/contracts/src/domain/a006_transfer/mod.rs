pub mod aggregate;

pub use aggregate::{advance_local_status, CreateTransferRequest, Transfer, TransferDraft, TransferLine, TRANSFER_FILTERS};
