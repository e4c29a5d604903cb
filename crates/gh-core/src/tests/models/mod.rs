mod profile;
mod profile_kind;
