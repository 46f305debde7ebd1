pub mod http_adapter;
pub mod markup;
