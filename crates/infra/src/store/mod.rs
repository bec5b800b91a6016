//! Lead storage adapters

pub mod supabase;

pub use supabase::SupabaseLeadRepository;
