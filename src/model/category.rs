use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

const WAITING_DESCRIPTION: &str = "Please wait until the owner can help you. **Response time may vary due to many factors, so please be patient.**";
const PURCHASE_DESCRIPTION: &str =
    "Please tell us which product you would like to buy and your preferred payment method.";

/// Kind of ticket a member can open from the category select menu.
///
/// The select menu submits the category label as its value, so `label()` and
/// `FromStr` must stay in sync with menus posted by earlier deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketCategory {
    Purchase,
    Support,
    Replacement,
}

impl TicketCategory {
    /// All categories in the order they appear in the select menu.
    pub const ALL: [TicketCategory; 3] = [
        TicketCategory::Purchase,
        TicketCategory::Support,
        TicketCategory::Replacement,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Purchase => "Purchase",
            Self::Support => "Support",
            Self::Replacement => "Replacement",
        }
    }

    /// Short text shown under the option in the select menu.
    pub fn option_description(self) -> &'static str {
        match self {
            Self::Purchase => "Open a ticket to buy a product",
            Self::Support => "General assistance and questions",
            Self::Replacement => "Request a product replacement",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Purchase => "🛒",
            Self::Support => "💬",
            Self::Replacement => "⚙️",
        }
    }

    /// Name of the ticket channel opened by `username`.
    pub fn channel_name(self, username: &str) -> String {
        format!("{}-{}", self.label().to_lowercase(), username)
    }

    /// Title of the intro embed posted into a new ticket.
    pub fn intro_title(self) -> String {
        format!("{} Ticket", self.label())
    }

    pub fn intro_description(self) -> &'static str {
        match self {
            Self::Purchase => PURCHASE_DESCRIPTION,
            Self::Support | Self::Replacement => WAITING_DESCRIPTION,
        }
    }

    /// Information the member must provide, as an embed field `(name, value)`.
    pub fn requirements(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Replacement => Some((
                "🔧 Replacement Requirements",
                "Please provide the following information:\n\
                 • **Video** accessing the account.\n\
                 • **Invoice ID and Order ID**.\n\
                 • **Full proof** of payment.\n\
                 • **Email** used for payment.",
            )),
            Self::Purchase | Self::Support => None,
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TicketCategory {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == value)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown ticket category '{}'", value)))
    }
}
