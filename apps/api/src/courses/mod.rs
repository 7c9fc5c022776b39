// Course discovery via web search, restricted to known learning platforms.

pub mod fallback;
pub mod finder;
pub mod handlers;
pub mod platforms;
