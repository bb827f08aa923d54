fn main() -> anyhow::Result<()> {
    larder_lib::run()
}
