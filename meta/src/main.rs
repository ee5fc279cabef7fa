fn main() {
    multiversx_sc_meta_lib::cli_main::<subchain_base::AbiProvider>();
}
