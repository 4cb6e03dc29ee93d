mod cache;


pub use cache::StatsCache;
