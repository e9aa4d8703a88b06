fn main() {
    multiversx_sc_meta_lib::cli_main::<org_controller::AbiProvider>();
}
