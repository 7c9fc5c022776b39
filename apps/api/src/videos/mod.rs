// Tutorial video lookup. No fallback data: failures return an empty list.

pub mod handlers;
