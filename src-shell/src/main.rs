fn main() -> anyhow::Result<()> {
    snowy_lib::run()
}
