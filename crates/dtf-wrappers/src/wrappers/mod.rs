pub mod dtf_factory_full;
pub mod erc20_mintable;
pub mod lairry_fink_fund;
