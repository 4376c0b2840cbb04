fn main() -> color_eyre::eyre::Result<()> {
    deployenv::cli::main()
}
