//! Tests for CLI argument parsing.

use super::cli::Cli;

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_args() {
        let cli = Cli::parse_from_iter([
            "discord-notify",
            "--webhook-url",
            "https://discord.com/api/webhooks/test",
            "--content",
            "hello",
        ]);

        assert_eq!(
            cli.webhook_url.as_deref(),
            Some("https://discord.com/api/webhooks/test")
        );
        assert_eq!(cli.content.as_deref(), Some("hello"));
    }

    #[test]
    fn parse_no_args_leaves_everything_unset() {
        let cli = Cli::parse_from_iter(["discord-notify"]);

        assert_eq!(cli.webhook_url, None);
        assert_eq!(cli.content, None);
        assert_eq!(cli.tts, None);
        assert_eq!(cli.embed_fields, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_message_options() {
        let cli = Cli::parse_from_iter([
            "discord-notify",
            "--content",
            "build finished",
            "--username",
            "ci-bot",
            "--avatar-url",
            "https://example.com/bot.png",
            "--tts",
            "true",
        ]);

        assert_eq!(cli.content.as_deref(), Some("build finished"));
        assert_eq!(cli.username.as_deref(), Some("ci-bot"));
        assert_eq!(cli.avatar_url.as_deref(), Some("https://example.com/bot.png"));
        assert_eq!(cli.tts.as_deref(), Some("true"));
    }

    #[test]
    fn parse_embed_options() {
        let cli = Cli::parse_from_iter([
            "discord-notify",
            "--embed-title",
            "Deploy",
            "--embed-description",
            "Deployed to production",
            "--embed-url",
            "https://example.com/run/1",
            "--embed-timestamp",
            "2024-01-01T00:00:00Z",
            "--embed-color",
            "ff0000",
            "--embed-author-name",
            "release-bot",
            "--embed-author-url",
            "https://example.com/bot",
            "--embed-author-icon-url",
            "https://example.com/bot.png",
            "--embed-footer-text",
            "pipeline #42",
            "--embed-footer-icon-url",
            "https://example.com/footer.png",
            "--embed-fields",
            r#"[{"name": "status", "value": "green"}]"#,
        ]);

        assert_eq!(cli.embed_title.as_deref(), Some("Deploy"));
        assert_eq!(
            cli.embed_description.as_deref(),
            Some("Deployed to production")
        );
        assert_eq!(cli.embed_url.as_deref(), Some("https://example.com/run/1"));
        assert_eq!(cli.embed_timestamp.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(cli.embed_color.as_deref(), Some("ff0000"));
        assert_eq!(cli.embed_author_name.as_deref(), Some("release-bot"));
        assert_eq!(cli.embed_author_url.as_deref(), Some("https://example.com/bot"));
        assert_eq!(
            cli.embed_author_icon_url.as_deref(),
            Some("https://example.com/bot.png")
        );
        assert_eq!(cli.embed_footer_text.as_deref(), Some("pipeline #42"));
        assert_eq!(
            cli.embed_footer_icon_url.as_deref(),
            Some("https://example.com/footer.png")
        );
        assert_eq!(
            cli.embed_fields.as_deref(),
            Some(r#"[{"name": "status", "value": "green"}]"#)
        );
    }

    #[test]
    fn parse_logging_options() {
        let cli = Cli::parse_from_iter(["discord-notify", "--show-payload", "true", "--verbose"]);

        assert_eq!(cli.show_payload.as_deref(), Some("true"));
        assert!(cli.verbose);
    }

    #[test]
    fn parse_verbose_short_flag() {
        let cli = Cli::parse_from_iter(["discord-notify", "-v"]);

        assert!(cli.verbose);
    }

    #[test]
    fn boolean_inputs_are_raw_strings() {
        // The CLI layer does not interpret boolean inputs; resolution does.
        let cli = Cli::parse_from_iter(["discord-notify", "--tts", "yes", "--show-payload", "1"]);

        assert_eq!(cli.tts.as_deref(), Some("yes"));
        assert_eq!(cli.show_payload.as_deref(), Some("1"));
    }

    #[test]
    fn parse_empty_values_are_accepted() {
        let cli = Cli::parse_from_iter(["discord-notify", "--content", "", "--webhook-url", ""]);

        assert_eq!(cli.content.as_deref(), Some(""));
        assert_eq!(cli.webhook_url.as_deref(), Some(""));
    }
}
