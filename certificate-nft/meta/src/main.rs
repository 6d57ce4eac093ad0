fn main() {
    multiversx_sc_meta::cli_main::<certificate_nft::AbiProvider>();
}
