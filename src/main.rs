fn main() {
    if let Err(err) = pricetools::newprice::run(std::env::args_os()) {
        eprintln!("error processing workbook: {err:#}");
        std::process::exit(1);
    }
}
