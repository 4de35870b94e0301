mod wire_codes;
