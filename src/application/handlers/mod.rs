//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations over ports.

pub mod chat;
pub mod facility;
pub mod medicine;

pub use chat::{
    ChatError, ChatReply, ChatSettings, GetConversationHistoryHandler,
    GetConversationHistoryQuery, ReplyState, SendChatMessageCommand, SendChatMessageHandler,
    SpeechRequestError, SynthesizeSpeechCommand, SynthesizeSpeechHandler,
};
pub use facility::{
    FacilityLocator, FindNearbyFacilitiesHandler, FindNearbyFacilitiesQuery,
    FindPharmaciesForMedicineHandler, FindPharmaciesQuery, NearbyError, NearbyFacilities,
    PharmaciesForMedicine, PharmacyListing, PharmacySearchError, SearchProfile,
};
pub use medicine::{ComparePricesHandler, ComparePricesQuery, PriceQueryError};
