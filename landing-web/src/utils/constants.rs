//! Application constants

/// Pricing cards, in document order.
pub const PRICING_CARD_SELECTOR: &str = ".pricing-card";

/// Countdown time-unit containers animated on load.
pub const TIME_UNIT_SELECTOR: &str = ".time-unit";

/// Attribute carrying a pricing card's position.
pub const CARD_INDEX_ATTR: &str = "data-card-index";

/// Optional inline JSON block overriding the landing configuration.
pub const CONFIG_SCRIPT_ID: &str = "landing-config";

// Success popup
pub const TOAST_STYLE: &str = "position: fixed; \
    top: 50%; \
    left: 50%; \
    transform: translate(-50%, -50%); \
    background: linear-gradient(135deg, #5175FF 0%, #3E5BCC 100%); \
    color: white; \
    padding: 2rem 3rem; \
    border-radius: 20px; \
    box-shadow: 0 8px 32px rgba(81, 117, 255, 0.3); \
    z-index: 1000; \
    text-align: center;";
pub const TOAST_HEADING_STYLE: &str = "margin-bottom: 0.5rem; font-size: 1.5rem;";

// Signup form state classes
pub const ERROR_VISIBLE_CLASS: &str = "show";
pub const INPUT_ERROR_CLASS: &str = "error";
