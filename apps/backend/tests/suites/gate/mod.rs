mod pass_through;
mod redirects;
