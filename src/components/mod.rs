pub mod synergy;
