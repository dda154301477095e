//! Content store adapters.

mod dto;
mod supabase;

pub use supabase::SupabaseContentStore;
