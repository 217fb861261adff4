/// Custom id of the category select menu.
///
/// Discord routes interactions on previously posted menus by this id. Changing
/// it breaks every menu already posted in a guild.
pub const CATEGORY_SELECT_ID: &str = "void_select";

/// Custom id of the close button attached to every ticket intro message.
pub const CLOSE_BUTTON_ID: &str = "close_ticket";

/// Persistent interactive components posted by the bot.
///
/// Components have no timeout: they keep working for as long as the message
/// carrying them exists, across any number of restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketComponent {
    /// Select menu used to open a ticket of a given category
    CategorySelect,
    /// Button that closes, archives and deletes a ticket
    CloseButton,
}

impl TicketComponent {
    pub const ALL: [TicketComponent; 2] =
        [TicketComponent::CategorySelect, TicketComponent::CloseButton];

    pub fn custom_id(self) -> &'static str {
        match self {
            Self::CategorySelect => CATEGORY_SELECT_ID,
            Self::CloseButton => CLOSE_BUTTON_ID,
        }
    }
}
