use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn texpp_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("texpp"));
	cmd.env("NO_COLOR", "1").env_remove("TEXPP_LOG");
	cmd
}

pub const ADDER_PACKAGE: &str = "package arith is
  component adder
    port (a, b : in bit; s : out bit);
  end component;
end package arith;
";
