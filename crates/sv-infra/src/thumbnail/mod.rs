mod decode;
mod http_fetcher;

pub use http_fetcher::HttpThumbnailFetcher;
