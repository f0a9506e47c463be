mod track;

pub use track::TrackMetadata;
