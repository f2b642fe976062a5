mod admin;
mod submissions;
