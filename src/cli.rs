use std::ffi::OsString;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "beacon_bluff",
    version,
    about = "Inject a single 802.11 beacon frame advertising an SSID"
)]
pub struct Cli {
    /// WiFi interface name, must be in monitor mode
    #[arg(short, long, value_name = "INTERFACE_NAME")]
    pub interface: String,

    /// SSID to advertise, sent byte for byte
    #[arg(short, long, value_name = "SSID")]
    pub ssid: OsString,

    /// MAC address to use as transmitter and BSSID
    #[arg(short, long, value_name = "MAC_ADDRESS")]
    pub mac: String,
}

impl Cli {
    /// The SSID exactly as it was passed on the command line.
    #[cfg(unix)]
    pub fn ssid_bytes(&self) -> Vec<u8> {
        use std::os::unix::ffi::OsStrExt;
        self.ssid.as_bytes().to_vec()
    }

    #[cfg(not(unix))]
    pub fn ssid_bytes(&self) -> Vec<u8> {
        self.ssid.to_string_lossy().into_owned().into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_and_long_flags() {
        let short = Cli::try_parse_from([
            "beacon_bluff",
            "-i",
            "wlan0mon",
            "-s",
            "TestNet",
            "-m",
            "02:00:00:00:00:01",
        ])
        .unwrap();
        let long = Cli::try_parse_from([
            "beacon_bluff",
            "--interface",
            "wlan0mon",
            "--ssid",
            "TestNet",
            "--mac",
            "02:00:00:00:00:01",
        ])
        .unwrap();

        for cli in [short, long] {
            assert_eq!(cli.interface, "wlan0mon");
            assert_eq!(cli.ssid_bytes(), b"TestNet".to_vec());
            assert_eq!(cli.mac, "02:00:00:00:00:01");
        }
    }

    #[test]
    fn test_empty_ssid_is_accepted() {
        let cli = Cli::try_parse_from([
            "beacon_bluff",
            "-i",
            "wlan0mon",
            "-s",
            "",
            "-m",
            "02:00:00:00:00:01",
        ])
        .unwrap();
        assert!(cli.ssid_bytes().is_empty());
    }

    #[test]
    fn test_mac_is_not_validated_by_parser() {
        let cli = Cli::try_parse_from(["beacon_bluff", "-i", "wlan0mon", "-s", "x", "-m", "zz"])
            .unwrap();
        assert_eq!(cli.mac, "zz");
    }

    #[test]
    fn test_missing_options() {
        let full = [
            ("-i", "wlan0mon"),
            ("-s", "TestNet"),
            ("-m", "02:00:00:00:00:01"),
        ];

        for skip in 0..full.len() {
            let mut args = vec!["beacon_bluff"];
            for (idx, (flag, value)) in full.iter().enumerate() {
                if idx != skip {
                    args.push(*flag);
                    args.push(*value);
                }
            }

            let err = Cli::try_parse_from(args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_ssid() {
        use std::os::unix::ffi::OsStringExt;

        let ssid = OsString::from_vec(vec![0xff, 0xfe, b'a']);
        let cli = Cli::try_parse_from([
            OsString::from("beacon_bluff"),
            OsString::from("-i"),
            OsString::from("wlan0mon"),
            OsString::from("-s"),
            ssid,
            OsString::from("-m"),
            OsString::from("02:00:00:00:00:01"),
        ])
        .unwrap();
        assert_eq!(cli.ssid_bytes(), vec![0xff, 0xfe, b'a']);
    }
}
