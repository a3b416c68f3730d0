use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::addresses::{dtos as addresses_dtos, handlers as addresses_handlers};
use crate::features::conversations::{
    dtos as conversations_dtos, handlers as conversations_handlers,
    models as conversations_models,
};
use crate::features::messages::{dtos as messages_dtos, handlers as messages_handlers};
use crate::features::sessions::{dtos as sessions_dtos, handlers as sessions_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Messages
        messages_handlers::send_message,
        // Addresses (stateless)
        addresses_handlers::search_addresses,
        // Sessions
        sessions_handlers::get_results,
        sessions_handlers::select_address,
        sessions_handlers::get_selection,
        sessions_handlers::get_shipping_estimates,
        // Conversations
        conversations_handlers::get_conversation,
        conversations_handlers::start_conversation,
        conversations_handlers::choose_courier,
        conversations_handlers::choose_cod,
        conversations_handlers::cancel_conversation,
    ),
    components(
        schemas(
            Meta,
            // Messages
            messages_dtos::SendMessageDto,
            messages_dtos::MessageReplyKind,
            messages_dtos::MessageReplyDto,
            ApiResponse<messages_dtos::MessageReplyDto>,
            // Addresses
            addresses_dtos::AddressDetailDto,
            addresses_dtos::AddressSummaryDto,
            addresses_dtos::AddressPageDto,
            ApiResponse<addresses_dtos::AddressPageDto>,
            ApiResponse<addresses_dtos::AddressDetailDto>,
            // Sessions
            sessions_dtos::SelectAddressDto,
            sessions_dtos::CourierRateDto,
            sessions_dtos::ShippingEstimateDto,
            ApiResponse<sessions_dtos::ShippingEstimateDto>,
            // Conversations
            conversations_models::Courier,
            conversations_models::DialogueStep,
            conversations_models::ShipmentRequest,
            conversations_dtos::ChooseCourierDto,
            conversations_dtos::ChooseCodDto,
            conversations_dtos::LabelDto,
            conversations_dtos::DialogueReplyDto,
            ApiResponse<conversations_dtos::DialogueReplyDto>,
        )
    ),
    tags(
        (name = "messages", description = "Inbound chat messages: commands, dialogue answers and searches"),
        (name = "addresses", description = "Indonesian postal-code directory search (public)"),
        (name = "sessions", description = "Cached search results, selection and shipping estimates"),
        (name = "conversations", description = "Shipping label (resi) dialogue"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Kodepos API",
        version = "0.1.0",
        description = "API documentation for Kodepos",
    )
)]
pub struct ApiDoc;

/// Adds the `X-User-Id` header scheme to the OpenAPI document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "user_id",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-User-Id"))),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
