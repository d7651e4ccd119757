pub mod degrees;
