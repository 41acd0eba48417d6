use rstest::fixture;
use tempfile::TempDir;

/// Package `P` whose component `adder` spans lines 2 to 4.
pub const SMALL_PACKAGE: &str = "library ieee;
package P is
  component adder
    port (a : in bit);
  end component;
end package P;
";

/// Package `arith` with two components. `adder` spans lines 11 to 17.
pub const ARITH_PACKAGE: &str = "library ieee;
use ieee.std_logic_1164.all;

package arith is
  component subtractor
    port (
      a : in std_logic;
      b : in std_logic
    );
  end component;

  component adder
    generic (width : natural := 8);
    port (
      a, b : in std_logic_vector(width - 1 downto 0);
      s : out std_logic_vector(width - 1 downto 0)
    );
  end component;
end package arith;
";

/// Architecture with the instance `u0` on lines 9 to 14, an `EOB` comment block
/// starting on line 6 and a `begin_note` / `end_note` pair on lines 16 and 19.
/// The instance `u1` is never closed by a `);` line of its own.
pub const TOP_ENTITY: &str = "entity top is
end entity top;

architecture rtl of top is
  signal x, y, s : std_logic_vector(7 downto 0);
begin
  -- begin_example
  -- Instantiate the adder with the default width.
  -- The sum appears on s.
  u0 : adder
    port map (
      a => x,
      b => y,
      s => s
    );

  -- begin_note
  u1 : subtractor
    port map (a => x(0), b => y(0));
  -- end_note
end architecture rtl;
";

/// A directory holding `foo.vhd`, `arith.vhd` and `top.vhd`.
#[fixture]
pub fn sources() -> TempDir {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(dir.path().join("foo.vhd"), SMALL_PACKAGE).unwrap();
	std::fs::write(dir.path().join("arith.vhd"), ARITH_PACKAGE).unwrap();
	std::fs::write(dir.path().join("top.vhd"), TOP_ENTITY).unwrap();
	dir
}

/// The lines of `content` from `first` to `last`, inclusive.
pub fn lines(content: &str, first: usize, last: usize) -> String {
	content
		.split_inclusive('\n')
		.skip(first)
		.take(last - first + 1)
		.collect()
}
