mod fake_api;
mod fetch_task;
mod scope;
