mod brand;
mod member;
mod priority;
mod status;
mod ticket;

pub use brand::{AssetRef, Brand, BrandColor, BrandFont, ColorType, FontType};
pub use member::TeamMember;
pub use priority::Priority;
pub use status::TicketStatus;
pub use ticket::{Attachment, Comment, DesignType, DesignVersion, Ticket};
