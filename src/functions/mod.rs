pub mod asset_url;
