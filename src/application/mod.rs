//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers hold their collaborators as `Arc<dyn Port>` and decide, stage by
//! stage, whether a collaborator failure degrades the result or aborts it.

pub mod handlers;

pub use handlers::{
    // Chat
    ChatError, ChatReply, ChatSettings, ReplyState, SendChatMessageCommand, SendChatMessageHandler,
    GetConversationHistoryHandler, GetConversationHistoryQuery,
    SpeechRequestError, SynthesizeSpeechCommand, SynthesizeSpeechHandler,
    // Facilities
    FacilityLocator, FindNearbyFacilitiesHandler, FindNearbyFacilitiesQuery,
    FindPharmaciesForMedicineHandler, FindPharmaciesQuery, NearbyError, NearbyFacilities,
    PharmaciesForMedicine, PharmacyListing, PharmacySearchError, SearchProfile,
    // Medicine
    ComparePricesHandler, ComparePricesQuery, PriceQueryError,
};
