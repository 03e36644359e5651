fn main() -> anyhow::Result<()> {
    ziptab_lib::run()
}
