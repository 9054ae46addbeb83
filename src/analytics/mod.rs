pub mod vasicek_moments;
