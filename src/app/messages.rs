use crate::app::domain::menu::ItemId;

/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Menu browsing
    SelectCategory(String),

    // Cart mutations
    IncrementItem(ItemId),
    DecrementItem(ItemId),
    RemoveItem(ItemId),
    ClearOrder,

    // Checkout
    AddressEdited,
    SubmitOrder,
}
