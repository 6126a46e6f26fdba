pub mod review_proxy;
